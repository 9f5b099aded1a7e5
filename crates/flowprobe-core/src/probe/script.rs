//! Inner probe script and runtime invocation.
//!
//! The script runs under the container's interpreter, performs one HTTPS
//! request and prints a single `@@flowprobe-result {json}` line. The API key
//! never appears in the script or argv: it is forwarded by name with
//! `exec -e FLOWPROBE_API_KEY` and read from `process.env`.

use std::time::Duration;

use secrecy::SecretString;

use flowprobe_types::config::ProbeConfig;
use flowprobe_types::probe::{ProbeTarget, RESULT_RECORD_PREFIX};

/// Environment variable carrying the API key into the container.
pub const CREDENTIAL_ENV: &str = "FLOWPROBE_API_KEY";

/// A fully prepared runtime command.
#[derive(Debug)]
pub struct ProbeInvocation {
    /// Runtime binary, e.g. `docker`.
    pub program: String,
    pub args: Vec<String>,
    pub timeout: Duration,
    /// Value exported as [`CREDENTIAL_ENV`] to the runtime process.
    pub credential: Option<SecretString>,
}

impl ProbeInvocation {
    /// Build the `<runtime> exec -e FLOWPROBE_API_KEY <container> <interpreter> -e <script>`
    /// command for `config`.
    pub fn for_config(config: &ProbeConfig, credential: Option<SecretString>) -> Self {
        let timeout = Duration::from_secs(config.timeout_secs);
        let script = render_script(&config.target(), request_timeout(timeout));
        Self {
            program: config.runtime.clone(),
            args: vec![
                "exec".to_string(),
                "-e".to_string(),
                CREDENTIAL_ENV.to_string(),
                config.container.clone(),
                config.interpreter.clone(),
                "-e".to_string(),
                script,
            ],
            timeout,
            credential,
        }
    }

    /// Human-readable command line with the script elided.
    pub fn display_command(&self) -> String {
        let mut parts = vec![self.program.clone()];
        for arg in &self.args {
            if arg.contains('\n') {
                parts.push("'<probe script>'".to_string());
            } else {
                parts.push(arg.clone());
            }
        }
        parts.join(" ")
    }

    /// The inline script argument.
    pub fn script(&self) -> Option<&str> {
        self.args.last().map(String::as_str)
    }
}

/// In-container request timeout for an outer ceiling of `outer`.
///
/// Four fifths of the ceiling, so the script reports its own timeout record
/// before the runtime process is abandoned and the interpreter inside the
/// container would otherwise be left running.
pub fn request_timeout(outer: Duration) -> Duration {
    outer * 4 / 5
}

/// Render the Node.js probe script for `target`.
///
/// String values are embedded as JSON string literals, which are valid
/// JavaScript literals. At most one result record is printed.
pub fn render_script(target: &ProbeTarget, request_timeout: Duration) -> String {
    let lit = |s: &str| serde_json::Value::from(s).to_string();

    format!(
        r#"
const https = require('https');
let reported = false;
const emit = (record) => {{
  if (reported) return;
  reported = true;
  console.log({prefix} + JSON.stringify(record));
}};

console.log('Testing MCP workflow creation...');

const options = {{
  hostname: {host},
  port: {port},
  path: {path},
  method: {method},
  headers: {{ [{header}]: process.env.{env} || '' }},
}};

const req = https.request(options, (res) => {{
  console.log('MCP Container N8N API Status:', res.statusCode);
  res.resume();
  emit({{ statusCode: res.statusCode, ok: res.statusCode === 200 }});
}});

req.setTimeout({timeout_ms}, () => {{
  req.destroy(new Error('timeout'));
}});

req.on('error', (e) => {{
  console.log('MCP API Error:', e.message);
  emit({{ ok: false, error: e.message }});
}});

req.end();
"#,
        prefix = lit(RESULT_RECORD_PREFIX),
        host = lit(&target.host),
        port = target.port,
        path = lit(&target.path),
        method = lit(&target.method),
        header = lit(&target.api_key_header),
        env = CREDENTIAL_ENV,
        timeout_ms = request_timeout.as_millis(),
    )
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn script_embeds_target_as_literals() {
        let script = render_script(&ProbeConfig::default().target(), Duration::from_secs(24));
        assert!(script.contains(r#"hostname: "lifemastery.app.n8n.cloud""#));
        assert!(script.contains("port: 443,"));
        assert!(script.contains(r#"path: "/api/v1/workflows""#));
        assert!(script.contains(r#"method: "GET""#));
        assert!(script.contains(r#"["X-N8N-API-KEY"]: process.env.FLOWPROBE_API_KEY"#));
        assert!(script.contains(r#""@@flowprobe-result ""#));
    }

    #[test]
    fn script_escapes_quotes_in_values() {
        let mut config = ProbeConfig::default();
        config.path = "/api/'v1\"".to_string();
        let timeout = Duration::from_secs(config.timeout_secs);
        let script = render_script(&config.target(), request_timeout(timeout));
        assert!(script.contains(r#"path: "/api/'v1\"""#));
    }

    #[test]
    fn invocation_argument_order() {
        let config = ProbeConfig::default();
        let invocation = ProbeInvocation::for_config(&config, None);
        assert_eq!(invocation.program, "docker");
        assert_eq!(
            &invocation.args[..6],
            &["exec", "-e", CREDENTIAL_ENV, "n8n-mcp-configured", "node", "-e"]
        );
        assert_eq!(invocation.timeout, Duration::from_secs(30));
        assert!(invocation.script().unwrap().contains("https.request"));
    }

    #[test]
    fn credential_never_enters_argv() {
        let config = ProbeConfig::default();
        let invocation =
            ProbeInvocation::for_config(&config, Some(SecretString::from("sk-very-secret".to_string())));
        assert!(invocation.args.iter().all(|a| !a.contains("sk-very-secret")));
        assert_eq!(
            invocation.credential.as_ref().unwrap().expose_secret(),
            "sk-very-secret"
        );
    }

    #[test]
    fn request_times_out_before_outer_ceiling() {
        assert_eq!(request_timeout(Duration::from_secs(30)), Duration::from_secs(24));
        assert_eq!(request_timeout(Duration::from_secs(1)), Duration::from_millis(800));

        let invocation = ProbeInvocation::for_config(&ProbeConfig::default(), None);
        let script = invocation.script().unwrap();
        assert!(script.contains("req.setTimeout(24000, "));
        assert!(script.contains("req.destroy(new Error('timeout'))"));
        assert!(script.contains("if (reported) return;"));
    }

    #[test]
    fn display_command_elides_script() {
        let invocation = ProbeInvocation::for_config(&ProbeConfig::default(), None);
        assert_eq!(
            invocation.display_command(),
            "docker exec -e FLOWPROBE_API_KEY n8n-mcp-configured node -e '<probe script>'"
        );
    }
}
