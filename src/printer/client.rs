//! Blocking Moonraker HTTP client
//!
//! Every request uses a short fixed timeout and is tried once.

use log::debug;
use serde::Deserialize;
use std::error::Error;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Deserialize)]
struct FileListResponse {
    result: Vec<FileEntry>,
}

#[derive(Debug, Deserialize)]
struct FileEntry {
    path: String,
}

#[derive(Debug, Deserialize)]
struct GcodeHelpResponse {
    result: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ObjectsQueryResponse {
    result: ObjectsQueryResult,
}

#[derive(Debug, Deserialize)]
struct ObjectsQueryResult {
    status: PrinterStatus,
}

#[derive(Debug, Deserialize)]
struct PrinterStatus {
    print_stats: PrintStats,
}

#[derive(Debug, Deserialize)]
struct PrintStats {
    #[serde(default)]
    filename: String,
}

pub struct MoonrakerClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl MoonrakerClient {
    /// Client for the Moonraker instance at `host:port`
    pub fn new(address: &str) -> Result<Self, Box<dyn Error>> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            base_url: format!("http://{}", address),
            client,
        })
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn get<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T, Box<dyn Error>> {
        let url = self.url(endpoint);
        debug!("[fuzzel-launch] GET {}", url);
        let response = self.client.get(&url).send()?.error_for_status()?;
        Ok(response.json::<T>()?)
    }

    fn post(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<(), Box<dyn Error>> {
        let url = self.url(endpoint);
        debug!("[fuzzel-launch] POST {} {:?}", url, query);
        self.client
            .post(&url)
            .query(query)
            .send()?
            .error_for_status()?;
        Ok(())
    }

    /// Paths of every printable file
    pub fn list_files(&self) -> Result<Vec<String>, Box<dyn Error>> {
        let response: FileListResponse = self.get("/server/files/list")?;
        Ok(file_paths(response))
    }

    /// Names of the available G-code macros
    pub fn list_macros(&self) -> Result<Vec<String>, Box<dyn Error>> {
        let response: GcodeHelpResponse = self.get("/printer/gcode/help")?;
        Ok(response.result.keys().cloned().collect())
    }

    /// File of the current or most recent print
    pub fn last_file(&self) -> Result<String, Box<dyn Error>> {
        let response: ObjectsQueryResponse =
            self.get("/printer/objects/query?webhooks&virtual_sdcard&print_stats")?;
        let filename = response.result.status.print_stats.filename;
        if filename.is_empty() {
            return Err("Printer reports no previous print".into());
        }
        Ok(filename)
    }

    pub fn start_print(&self, filename: &str) -> Result<(), Box<dyn Error>> {
        self.post("/printer/print/start", &[("filename", filename)])
    }

    pub fn run_gcode(&self, script: &str) -> Result<(), Box<dyn Error>> {
        self.post("/printer/gcode/script", &[("script", script)])
    }

    pub fn cancel_print(&self) -> Result<(), Box<dyn Error>> {
        self.run_gcode("CANCEL_PRINT")
    }

    pub fn firmware_restart(&self) -> Result<(), Box<dyn Error>> {
        self.post("/printer/firmware_restart", &[])
    }

    pub fn restart(&self) -> Result<(), Box<dyn Error>> {
        self.post("/printer/restart", &[])
    }

    pub fn emergency_stop(&self) -> Result<(), Box<dyn Error>> {
        self.post("/printer/emergency_stop", &[])
    }
}

fn file_paths(response: FileListResponse) -> Vec<String> {
    response.result.into_iter().map(|f| f.path).collect()
}
