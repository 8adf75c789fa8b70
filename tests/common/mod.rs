// file: tests/common/mod.rs
// version: 1.0.0
// guid: 0b5e9c27-d8a4-4f13-86c2-e7f1a4d03b95

//! Fake `rac` and `ring` binaries shared by the integration tests

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write an executable `/bin/sh` script named `name` into `dir`
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// A `ring` look-alike backed by a plain directory of license files
///
/// `put` stores the file as `lic-<n>.lic`; every invocation is appended to
/// `calls.log` one line per call.
pub struct FakeRing {
    pub dir: TempDir,
    pub binary: PathBuf,
    pub store: PathBuf,
    pub scratch_root: PathBuf,
    log: PathBuf,
}

impl FakeRing {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let store = dir.path().join("store");
        let scratch_root = dir.path().join("scratch");
        let log = dir.path().join("calls.log");
        fs::create_dir(&store).unwrap();
        fs::create_dir(&scratch_root).unwrap();

        let body = format!(
            r#"STORE='{store}'
printf '%s\n' "$*" >> '{log}'
[ "$1" = license ] || {{ echo "unknown command $1" >&2; exit 64; }}
cmd="$2"; shift 2
name=""; lic=""
while [ $# -gt 0 ]; do
  case "$1" in
    --name) name="$2"; shift 2 ;;
    --license) lic="$2"; shift 2 ;;
    --path) shift 2 ;;
    --all) shift ;;
    *) echo "unknown option $1" >&2; exit 64 ;;
  esac
done
case "$cmd" in
  list) ls "$STORE" | tr '\n' ' '; echo ;;
  info)
    [ -f "$STORE/$name" ] || {{ echo "license $name not found" >&2; exit 2; }}
    echo "License: $name"
    echo "Status: installed" ;;
  put)
    [ -f "$lic" ] || {{ echo "cannot read $lic" >&2; exit 3; }}
    n=$(ls "$STORE" | wc -l)
    cp "$lic" "$STORE/lic-$((n + 1)).lic" ;;
  get)
    [ -f "$STORE/$name" ] || {{ echo "license $name not found" >&2; exit 2; }}
    cp "$STORE/$name" "$lic" ;;
  remove) rm -f "$STORE/$name" ;;
  validate)
    [ -f "$STORE/$name" ] || {{ echo "license $name is not valid" >&2; exit 5; }} ;;
  *) echo "unknown subcommand $cmd" >&2; exit 64 ;;
esac"#,
            store = store.display(),
            log = log.display(),
        );
        let binary = write_script(dir.path(), "ring", &body);

        Self {
            dir,
            binary,
            store,
            scratch_root,
            log,
        }
    }

    /// Argument lines of every call so far
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Number of entries left behind in the scratch root
    pub fn leftover_scratch(&self) -> usize {
        fs::read_dir(&self.scratch_root).unwrap().count()
    }
}

/// Output of `rac cluster list` for two clusters
pub const CLUSTER_LIST: &str = "\
cluster                       : 1619820a-d36f-4d18-a754-8f6c9d6f8ab2
host                          : srv-1c
port                          : 1541
name                          : \"Main cluster\"
expiration-timeout            : 60
lifetime-limit                : 86400
max-memory-size               : 0
max-memory-time-limit         : 0
security-level                : 0
session-fault-tolerance-level : 0
load-balancing-mode           : performance
errors-count-threshold        : 0
kill-problem-processes        : yes
kill-by-memory-with-dump      : no

cluster                       : 6d6fa4a4-6b13-4f5f-bd6b-4d1c0a39c3a1
host                          : srv-2c
port                          : 2541
name                          : \"Test cluster\"
expiration-timeout            : 0
lifetime-limit                : 0
max-memory-size               : 0
max-memory-time-limit         : 0
security-level                : 1
session-fault-tolerance-level : 0
load-balancing-mode           : memory
errors-count-threshold        : 0
kill-problem-processes        : no
kill-by-memory-with-dump      : no
";

/// A `rac` look-alike printing `output` for `cluster list`
///
/// When `server` is given the script insists on it as the third argument.
pub fn fake_rac(dir: &Path, output: &str, server: Option<&str>) -> PathBuf {
    let data = dir.join("cluster-list.txt");
    fs::write(&data, output).unwrap();

    let server_check = match server {
        Some(server) => format!(
            "[ \"$3\" = '{}' ] || {{ echo \"unexpected server $3\" >&2; exit 9; }}",
            server
        ),
        None => "[ $# -eq 2 ] || { echo \"unexpected arguments\" >&2; exit 9; }".to_string(),
    };

    write_script(
        dir,
        "rac",
        &format!(
            "[ \"$1 $2\" = 'cluster list' ] || {{ echo \"unknown command\" >&2; exit 64; }}\n{}\ncat '{}'",
            server_check,
            data.display()
        ),
    )
}

/// A `ring` that deletes the directory holding its `--license` file, so the
/// caller's own removal fails, and then exits with `exit_code`
pub fn vanishing_ring(dir: &Path, exit_code: i32) -> PathBuf {
    write_script(
        dir,
        &format!("vanishing-ring-{}", exit_code),
        &format!(
            r#"lic=""
while [ $# -gt 0 ]; do
  [ "$1" = --license ] && lic="$2"
  shift
done
rm -rf "$(dirname "$lic")"
exit {}"#,
            exit_code
        ),
    )
}
