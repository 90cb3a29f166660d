use flate2::Compression;
use flate2::write::GzEncoder;
use logstat_core::conf::AnalyzerConfig;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

/// One nginx access line in the `ui_short` format.
pub fn access_line(path: &str, time: &str) -> String {
    format!(
        "1.196.116.32 -  - [29/Jun/2017:03:50:22 +0300] \"GET {path} HTTP/1.1\" 200 927 \"-\" \
         \"Lynx/2.8.8dev.9 libwww-FM/2.14\" \"-\" \"1498697422-2190034393-4708-9752759\" \
         \"dc7161be3\" {time}\n"
    )
}

/// Temporary log/report layout with a matching config.
pub struct LogDir {
    root: TempDir,
    pub config: AnalyzerConfig,
}

impl LogDir {
    pub fn new() -> Self {
        let root = tempdir().expect("failed to create temp dir");
        let log_dir = root.path().join("log");
        fs::create_dir(&log_dir).expect("failed to create log dir");

        let config = AnalyzerConfig {
            log_dir,
            report_dir: root.path().join("reports"),
            timestamp_file: Some(root.path().join("monitoring").join("logstat.ts")),
            ..Default::default()
        };

        Self { root, config }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn write_plain(&self, name: &str, body: &str) -> PathBuf {
        let path = self.config.log_dir.join(name);
        fs::write(&path, body).expect("failed to write log");
        path
    }

    pub fn write_gz(&self, name: &str, body: &str) -> PathBuf {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(body.as_bytes()).expect("gzip write");
        let path = self.config.log_dir.join(name);
        fs::write(&path, encoder.finish().expect("gzip finish")).expect("failed to write log");
        path
    }

    pub fn write_br(&self, name: &str, body: &str) -> PathBuf {
        let mut compressed = Vec::new();
        {
            let mut writer = brotli::CompressorWriter::new(&mut compressed, 4096, 5, 22);
            writer.write_all(body.as_bytes()).expect("brotli write");
        }
        let path = self.config.log_dir.join(name);
        fs::write(&path, compressed).expect("failed to write log");
        path
    }

    /// Write the config as HCL and return its path.
    pub fn write_config(&self) -> PathBuf {
        let path = self.root.path().join("logstat.hcl");
        let hcl = format!(
            "log_dir = \"{}\"\nreport_dir = \"{}\"\n",
            self.config.log_dir.display(),
            self.config.report_dir.display()
        );
        fs::write(&path, hcl).expect("failed to write config");
        path
    }
}

impl Default for LogDir {
    fn default() -> Self {
        Self::new()
    }
}
