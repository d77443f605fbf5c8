use regex::Regex;
use std::sync::OnceLock;

use super::{cached_regex, contains_any};

static COMPONENT_NAME: OnceLock<Option<Regex>> = OnceLock::new();
static ENDPOINT: OnceLock<Option<Regex>> = OnceLock::new();
static METHOD_NAME: OnceLock<Option<Regex>> = OnceLock::new();

pub fn generate_code(prompt: &str, code: &str) -> String {
    let lower = prompt.to_lowercase();

    if contains_any(&lower, &["component", "react"]) {
        react_component(code, prompt)
    } else if contains_any(&lower, &["hook", "usestate"]) {
        react_hooks(code)
    } else if contains_any(&lower, &["api", "fetch"]) {
        api_call(code, prompt)
    } else if contains_any(&lower, &["comment", "document"]) {
        add_comments(code)
    } else if contains_any(&lower, &["async", "await", "promise"]) {
        convert_to_async(code)
    } else if contains_any(&lower, &["typescript", "type"]) {
        add_types(code)
    } else if contains_any(&lower, &["error", "try", "catch"]) {
        wrap_in_try_catch(code)
    } else if contains_any(&lower, &["optimize", "performance"]) {
        optimize(code)
    } else if lower.contains("test") {
        unit_tests()
    } else if contains_any(&lower, &["refactor", "clean"]) {
        refactor(code)
    } else {
        enhance(code, prompt)
    }
}

fn component_name(prompt: &str) -> Option<String> {
    let re = cached_regex(
        &COMPONENT_NAME,
        r"(?i)component\s+(?:called\s+|named\s+)?([A-Za-z][A-Za-z0-9]*)",
    )?;
    re.captures(prompt)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

fn endpoint(prompt: &str) -> Option<String> {
    let re = cached_regex(&ENDPOINT, r"/[a-zA-Z0-9/_-]+")?;
    re.find(prompt).map(|m| m.as_str().to_string())
}

fn method_name(prompt: &str) -> Option<String> {
    let re = cached_regex(
        &METHOD_NAME,
        r"(?i)(get|post|put|delete|fetch)\s*([A-Za-z][A-Za-z0-9]*)?",
    )?;
    let caps = re.captures(prompt)?;
    let verb = caps.get(1)?.as_str();
    Some(match caps.get(2) {
        Some(noun) => format!("{verb}{}", noun.as_str()),
        None => verb.to_string(),
    })
}

const REACT_COMPONENT: &str = r#"import React, { useState } from 'react';

interface {name}Props {
  title?: string;
  onAction?: () => void;
}

const {name} = ({ title = "Default Title", onAction }: {name}Props) => {
  const [isActive, setIsActive] = useState(false);

  const handleClick = () => {
    setIsActive(!isActive);
    onAction?.();
  };

  return (
    <div className={`component-container ${isActive ? 'active' : ''}`}>
      <h2>{title}</h2>
      <button onClick={handleClick}>
        {isActive ? 'Deactivate' : 'Activate'}
      </button>
      {/* Original code integration */}
      <div className="original-content">
        {/* {first_line} */}
      </div>
    </div>
  );
};

export default {name};"#;

fn react_component(code: &str, prompt: &str) -> String {
    let name = component_name(prompt).unwrap_or_else(|| "NewComponent".to_string());
    let first_line = code.lines().next().unwrap_or("");
    REACT_COMPONENT
        .replace("{name}", &name)
        .replace("{first_line}", first_line)
}

const REACT_HOOKS: &str = r#"import React, { useState, useEffect, useCallback } from 'react';

// Enhanced with React hooks
const EnhancedComponent = () => {
  const [data, setData] = useState(null);
  const [loading, setLoading] = useState(false);
  const [error, setError] = useState(null);

  const fetchData = useCallback(async () => {
    setLoading(true);
    try {
      {body}
      setData(data);
    } catch (err) {
      setError(err.message);
    } finally {
      setLoading(false);
    }
  }, []);

  useEffect(() => {
    fetchData();
  }, [fetchData]);

  if (loading) return <div>Loading...</div>;
  if (error) return <div>Error: {error}</div>;

  return (
    <div>
      {/* Render your data here */}
      {JSON.stringify(data, null, 2)}
    </div>
  );
};

export default EnhancedComponent;"#;

const HOOK_DEFAULT_BODY: &str = "// Original logic here\n      const result = await fetch(\"/api/data\");\n      const data = await result.json();";

fn react_hooks(code: &str) -> String {
    let body = if code.contains("fetch") {
        code
    } else {
        HOOK_DEFAULT_BODY
    };
    REACT_HOOKS.replace("{body}", body)
}

const API_SERVICE: &str = r#"// Enhanced API integration
const apiService = {
  async {method}() {
    try {
      const response = await fetch('{endpoint}', {
        method: 'GET',
        headers: {
          'Content-Type': 'application/json',
          'Authorization': `Bearer ${localStorage.getItem('token')}`
        }
      });

      if (!response.ok) {
        throw new Error(`HTTP error! status: ${response.status}`);
      }

      const data = await response.json();
      return data;
    } catch (error) {
      console.error('API call failed:', error);
      throw error;
    }
  }
};

// Usage in component
{code}

// Integration example:
// const data = await apiService.fetchData();"#;

fn api_call(code: &str, prompt: &str) -> String {
    let endpoint = endpoint(prompt).unwrap_or_else(|| "/api/data".to_string());
    let method = method_name(prompt).unwrap_or_else(|| "fetchData".to_string());
    API_SERVICE
        .replace("{method}", &method)
        .replace("{endpoint}", &endpoint)
        .replace("{code}", code)
}

fn add_comments(code: &str) -> String {
    if code.contains("function example") {
        return r#"/**
 * Example function that demonstrates basic functionality
 * @returns {boolean} Always returns true
 */
function example() {
  // Log a greeting message to the console
  console.log("Hello world!");

  // Return success status
  return true;
}"#
        .to_string();
    }

    let annotated: Vec<String> = code
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{line} // TODO: Add specific comment")
            }
        })
        .collect();
    format!("// Enhanced with documentation\n{}", annotated.join("\n"))
}

fn convert_to_async(code: &str) -> String {
    if code.contains("function example") {
        return r#"async function example() {
  // Simulate async operation
  await new Promise(resolve => setTimeout(resolve, 1000));

  // Log a greeting message to the console
  console.log("Hello world!");

  // Return a promise that resolves to true
  return Promise.resolve(true);
}"#
        .to_string();
    }
    let awaited = code.replacen(
        '{',
        "{\n  await new Promise(resolve => setTimeout(resolve, 100));",
        1,
    );
    format!("async {awaited}")
}

fn add_types(code: &str) -> String {
    if code.contains("function example") {
        return r#"function example(): Promise<boolean> {
  // Log a greeting message to the console
  console.log("Hello world!");

  // Return a typed value
  return Promise.resolve(true);
}"#
        .to_string();
    }
    code.replacen("()", "(): void", 1)
}

fn wrap_in_try_catch(code: &str) -> String {
    let indented: Vec<String> = code.split('\n').map(|line| format!("  {line}")).collect();
    format!(
        "try {{\n{}\n}} catch (error) {{\n  console.error('An error occurred:', error);\n  throw error;\n}}",
        indented.join("\n")
    )
}

fn optimize(code: &str) -> String {
    if code.contains("console.log") {
        return code.replacen(
            "console.log(\"Hello world!\");",
            "// Optimized logging with performance consideration\nif (process.env.NODE_ENV === 'development') {\n  console.log(\"Hello world!\");\n}",
            1,
        );
    }
    format!("// Optimized version\n{code}\n// TODO: Consider memoization for expensive operations")
}

fn unit_tests() -> String {
    r#"// Unit tests for the function
import { example } from './example';

describe('example function', () => {
  test('should return true', () => {
    const result = example();
    expect(result).toBe(true);
  });

  test('should log hello world', () => {
    const consoleSpy = jest.spyOn(console, 'log');
    example();
    expect(consoleSpy).toHaveBeenCalledWith('Hello world!');
  });
});"#
        .to_string()
}

fn refactor(code: &str) -> String {
    if code.contains("function example") {
        return r#"// Refactored with better structure
const GREETING_MESSAGE = "Hello world!";

function example(): boolean {
  logGreeting();
  return getSuccessStatus();
}

function logGreeting(): void {
  console.log(GREETING_MESSAGE);
}

function getSuccessStatus(): boolean {
  return true;
}"#
        .to_string();
    }
    format!("// Refactored code\n{code}\n// TODO: Extract constants and helper functions")
}

fn enhance(code: &str, prompt: &str) -> String {
    format!(
        "// Enhanced based on: \"{prompt}\"\n{code}\n\n// Additional functionality added\n// TODO: Implement specific enhancements based on requirements"
    )
}
