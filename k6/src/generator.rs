//! k6 script generation
//!
//! Pure, stateless rendering of a script + config pair into k6's JavaScript
//! dialect. Identical input produces byte-identical output.

use loadbench_core::{Script, TestConfig};
use std::fmt::Write;

/// Render `script` + `config` into an executable k6 script
///
/// The generated options embed the configured VUs, the duration (seconds,
/// suffixed `s`), and fixed latency/error thresholds. Each step becomes one
/// `http.<verb>(url)` call followed by a fixed 2xx status check; the method
/// token comes from [`loadbench_core::Method::k6_verb`], which covers the
/// full verb set explicitly.
pub fn generate(script: &Script, config: &TestConfig) -> String {
    let mut steps = String::new();
    for (i, step) in script.steps.iter().enumerate() {
        // write! into a String cannot fail.
        let _ = write!(
            steps,
            r#"
  // Step {n}: {method} {url}
  const res_{i} = http.{verb}('{url}');
  check(res_{i}, {{
    'status is 2xx': (r) => r.status >= 200 && r.status < 300,
  }});
"#,
            n = i + 1,
            method = step.method,
            url = step.url,
            verb = step.method.k6_verb(),
            i = i,
        );
    }

    format!(
        r#"import http from 'k6/http';
import {{ check, sleep }} from 'k6';

export const options = {{
  vus: {vus},
  duration: '{duration}s',
  thresholds: {{
    http_req_duration: ['p(95)<2000', 'p(99)<5000'],
    http_req_failed: ['rate<0.1'],
  }},
}};

export default function() {{
{steps}
  sleep(1);
}}
"#,
        vus = config.vus,
        duration = config.duration,
        steps = steps,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadbench_core::{Method, Step, TestType};

    fn script() -> Script {
        Script {
            id: "abc".to_string(),
            steps: vec![
                Step::new(Method::Get, "http://example.com"),
                Step::new(Method::Post, "http://example.com/submit"),
                Step::new(Method::Delete, "http://example.com/item/1"),
            ],
        }
    }

    fn config() -> TestConfig {
        TestConfig {
            script_id: "abc".to_string(),
            test_type: TestType::Load,
            vus: 25,
            duration: 30,
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let first = generate(&script(), &config());
        let second = generate(&script(), &config());
        assert_eq!(first, second, "identical input must render byte-identically");
    }

    #[test]
    fn test_options_embed_vus_and_duration() {
        let rendered = generate(&script(), &config());
        assert!(rendered.contains("vus: 25,"));
        assert!(rendered.contains("duration: '30s',"));
        assert!(rendered.contains("http_req_duration: ['p(95)<2000', 'p(99)<5000']"));
        assert!(rendered.contains("http_req_failed: ['rate<0.1']"));
    }

    #[test]
    fn test_every_step_renders_its_verb() {
        let rendered = generate(&script(), &config());
        assert!(rendered.contains("http.get('http://example.com')"));
        assert!(rendered.contains("http.post('http://example.com/submit')"));
        assert!(rendered.contains("http.del('http://example.com/item/1')"));
        // One status check per step.
        assert_eq!(rendered.matches("'status is 2xx'").count(), 3);
    }

    #[test]
    fn test_empty_script_still_renders_valid_shell() {
        let empty = Script {
            id: "abc".to_string(),
            steps: Vec::new(),
        };
        let rendered = generate(&empty, &config());
        assert!(rendered.contains("export default function()"));
        assert!(!rendered.contains("http.get"));
    }
}
