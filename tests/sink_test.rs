use loki::error::Error;
use loki::header::compose;
use loki::language::Registry;
use loki::sink::write_header;
use std::fs;
use tempfile::TempDir;

fn sample_block() -> loki::header::HeaderBlock {
    let registry = Registry::builtin();
    let bash = registry.lookup_by_token("bash").unwrap();
    compose(bash, "John Doe", "A sample script", &[vec!["banner".to_string()]])
}

#[test]
fn test_write_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("script.sh");
    let block = sample_block();

    let written = write_header(&path, &block).unwrap();

    assert_eq!(written.path, path);
    assert_eq!(fs::read_to_string(&path).unwrap(), block.to_string());
}

#[cfg(unix)]
#[test]
fn test_written_file_is_executable() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("script.sh");

    let written = write_header(&path, &sample_block()).unwrap();

    assert!(written.executable);
    let mode = fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o755);
}

#[test]
fn test_existing_file_is_not_overwritten() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("script.sh");
    fs::write(&path, "echo keep\n").unwrap();

    match write_header(&path, &sample_block()) {
        Err(Error::AlreadyExists { path: reported }) => {
            assert_eq!(reported, path.display().to_string())
        }
        other => panic!("Expected AlreadyExists, got {:?}", other),
    }
    assert_eq!(fs::read_to_string(&path).unwrap(), "echo keep\n");
}

#[test]
fn test_missing_parent_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("script.sh");

    assert!(matches!(write_header(&path, &sample_block()), Err(Error::IoError(_))));
    assert!(!path.exists());
}
