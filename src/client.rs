//! HTTP collaborators: the uHunt statistics API and the judge submission
//! endpoint.
//!
//! Everything is blocking and synchronous: one CLI invocation performs at
//! most one round trip per logical query and renders once. The rendering
//! engine never sees this layer; it receives fully-formed records or an
//! explicit empty result that callers check before rendering.

use crate::model::{ProblemIndex, ProblemInfo, RankRow, RawSubmission, VerdictRow};
use serde_json::Value;
use std::path::PathBuf;

/// Base URL of the uHunt statistics API.
pub const UHUNT_BASE: &str = "https://uhunt.onlinejudge.org/api";

const JUDGE_BASE: &str = "https://onlinejudge.org";
const USER_AGENT: &str = "oj-cli-submit";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected response from {endpoint}: {detail}")]
    Decode {
        endpoint: &'static str,
        detail: String,
    },
    #[error("unknown user: {0}")]
    UnknownUser(String),
    #[error("login failed: {0}")]
    Login(String),
    #[error("submission failed: {0}")]
    Submit(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn decode(endpoint: &'static str, detail: impl Into<String>) -> ClientError {
    ClientError::Decode {
        endpoint,
        detail: detail.into(),
    }
}

/// Read-only client for the uHunt statistics API.
pub struct UhuntClient {
    http: reqwest::blocking::Client,
    base: String,
}

impl UhuntClient {
    pub fn new() -> Result<Self, ClientError> {
        Self::with_base(UHUNT_BASE)
    }

    /// Client against an alternate base URL.
    pub fn with_base(base: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(UhuntClient {
            http,
            base: base.into(),
        })
    }

    fn get_json(&self, path: &str) -> Result<Value, ClientError> {
        let url = format!("{}{}", self.base, path);
        Ok(self.http.get(&url).send()?.error_for_status()?.json()?)
    }

    /// Resolves a username to its numeric uHunt id.
    pub fn user_id(&self, name: &str) -> Result<u64, ClientError> {
        let value = self.get_json(&format!("/uname2uid/{name}"))?;
        match value.as_u64() {
            Some(id) if id > 0 => Ok(id),
            _ => Err(ClientError::UnknownUser(name.to_string())),
        }
    }

    /// Fetches the full problem catalogue and builds the id/number index.
    pub fn problems(&self) -> Result<ProblemIndex, ClientError> {
        let value = self.get_json("/p")?;
        let rows = value
            .as_array()
            .ok_or_else(|| decode("/p", "expected an array of problems"))?;

        let mut index = ProblemIndex::default();
        for row in rows {
            let row = row
                .as_array()
                .ok_or_else(|| decode("/p", "expected an array per problem"))?;
            let id = row
                .first()
                .and_then(Value::as_u64)
                .ok_or_else(|| decode("/p", "missing problem id"))?;
            let number = row
                .get(1)
                .and_then(Value::as_u64)
                .ok_or_else(|| decode("/p", "missing problem number"))?
                as u32;
            let title = row
                .get(2)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            index.insert(ProblemInfo { id, number, title });
        }
        Ok(index)
    }

    /// Submissions for a user, newest first. `limit` of `None` fetches all.
    pub fn submissions(
        &self,
        user_id: u64,
        limit: Option<usize>,
    ) -> Result<Vec<VerdictRow>, ClientError> {
        let path = match limit {
            Some(n) => format!("/subs-user-last/{user_id}/{n}"),
            None => format!("/subs-user/{user_id}"),
        };
        let value = self.get_json(&path)?;
        let mut rows = decode_submissions(&value, "/subs-user")?;
        rows.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        if let Some(n) = limit {
            rows.truncate(n);
        }
        Ok(rows)
    }

    /// Submissions for one problem number, newest first.
    pub fn submissions_for_problem(
        &self,
        user_id: u64,
        number: u32,
    ) -> Result<Vec<VerdictRow>, ClientError> {
        let value = self.get_json(&format!("/subs-nums/{user_id}/{number}/0"))?;
        // The endpoint keys the payload by user id; accept the bare shape too.
        let value = match value.get(user_id.to_string()) {
            Some(inner) => inner,
            None => &value,
        };
        let mut rows = decode_submissions(value, "/subs-nums")?;
        rows.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        Ok(rows)
    }

    /// Ranklist window of `above` users above and `below` users below the
    /// given user.
    pub fn ranklist(
        &self,
        user_id: u64,
        above: u32,
        below: u32,
    ) -> Result<Vec<RankRow>, ClientError> {
        let value = self.get_json(&format!("/ranklist/{user_id}/{above}/{below}"))?;
        serde_json::from_value(value).map_err(|e| decode("/ranklist", e.to_string()))
    }

    /// Metadata for a single problem number.
    pub fn problem_by_number(&self, number: u32) -> Result<ProblemInfo, ClientError> {
        let value = self.get_json(&format!("/p/num/{number}"))?;
        let id = value
            .get("pid")
            .and_then(Value::as_u64)
            .ok_or_else(|| decode("/p/num", "missing pid"))?;
        let number = value
            .get("num")
            .and_then(Value::as_u64)
            .ok_or_else(|| decode("/p/num", "missing num"))? as u32;
        let title = value
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Ok(ProblemInfo { id, number, title })
    }
}

fn decode_submissions(value: &Value, endpoint: &'static str) -> Result<Vec<VerdictRow>, ClientError> {
    let subs = value
        .get("subs")
        .ok_or_else(|| decode(endpoint, "missing subs field"))?;
    let raw: Vec<RawSubmission> =
        serde_json::from_value(subs.clone()).map_err(|e| decode(endpoint, e.to_string()))?;
    Ok(raw.into_iter().map(VerdictRow::from).collect())
}

/// Authenticated client for the judge website. Holds the session cookie
/// between login and submit.
pub struct JudgeClient {
    http: reqwest::blocking::Client,
}

impl JudgeClient {
    pub fn new() -> Result<Self, ClientError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .build()?;
        Ok(JudgeClient { http })
    }

    /// Logs in through the judge's script-friendly form endpoint. The
    /// session cookie lands in the cookie store for the following submit.
    pub fn login(&self, username: &str, password: &str) -> Result<(), ClientError> {
        let response = self
            .http
            .post(format!("{JUDGE_BASE}/"))
            .form(&[
                ("user", username),
                ("script", "true"),
                ("password", password),
            ])
            .send()?;
        match response.status().as_u16() {
            200 => Ok(()),
            403 => Err(ClientError::Login(
                "incorrect username or password (403)".to_string(),
            )),
            404 => Err(ClientError::Login("incorrect login URL (404)".to_string())),
            code => Err(ClientError::Login(format!("status code {code}"))),
        }
    }

    /// Uploads solution files for `problem`. Returns the judge's plain-text
    /// reply with `<br />` markup converted to newlines.
    pub fn submit(
        &self,
        problem: u32,
        language: u32,
        files: &[PathBuf],
    ) -> Result<String, ClientError> {
        let url = format!("{JUDGE_BASE}/index.php?option=com_onlinejudge&Itemid=25");

        let mut form = reqwest::blocking::multipart::Form::new()
            .text("submit", "true")
            .text("language", language.to_string())
            .text("localid", problem.to_string())
            .text("script", "true");
        for file in files {
            let source = std::fs::read(file)?;
            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let part = reqwest::blocking::multipart::Part::bytes(source)
                .file_name(name)
                .mime_str("application/octet-stream")?;
            form = form.part("codeupl", part);
        }

        let response = self.http.post(&url).multipart(form).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Submit(match status.as_u16() {
                403 => "access denied (403)".to_string(),
                404 => "incorrect submit URL (404)".to_string(),
                code => format!("status code {code}"),
            }));
        }
        Ok(response.text()?.replace("<br />", "\n"))
    }
}
