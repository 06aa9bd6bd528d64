use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().join("device");
        fs::create_dir_all(root.join("mnt/onboard/onboard/.apps")).expect("create apps root");
        Self { _tmp: tmp, root }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("folio").unwrap();
        cmd.arg("--root").arg(&self.root);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn write_file(&self, rel: &str, content: &str) {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture parent");
        }
        fs::write(path, content).expect("write fixture file");
    }

    pub fn set_flag(&self, rel: &str) {
        self.write_file(rel, "true");
    }

    pub fn read_file(&self, rel: &str) -> String {
        fs::read_to_string(self.root.join(rel)).expect("read fixture file")
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.root.join(rel).exists()
    }

    /// Create an application directory under the apps root, optionally with
    /// a shard document.
    pub fn make_app(&self, name: &str, shard: Option<&Value>) {
        let dir = self.root.join("mnt/onboard/onboard/.apps").join(name);
        fs::create_dir_all(&dir).expect("create app dir");
        if let Some(doc) = shard {
            let body = serde_json::to_string_pretty(doc).expect("serialize shard");
            fs::write(dir.join("app.json"), format!("{body}\n")).expect("write shard");
        }
    }

    pub fn read_shard(&self, app: &str) -> Value {
        let raw = self.read_file(&format!("mnt/onboard/onboard/.apps/{app}/app.json"));
        serde_json::from_str(&raw).expect("shard parses")
    }

    pub fn read_master(&self) -> Value {
        let raw = self.read_file("mnt/onboard/onboard/.apps/apps.json");
        serde_json::from_str(&raw).expect("master parses")
    }
}
