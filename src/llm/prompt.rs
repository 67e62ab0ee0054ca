//! Prompt templates for the plan / generate / feedback operations.
//!
//! The generation prompt pins down the exact oracle the generated suite must
//! encode: the fixture API's status-code table (see `crate::fixture`) and the
//! seven required test names. Anything looser and the model invents routes.

/// System prompt sent with every request (stable, reused).
pub fn system_prompt() -> String {
    "You are an AI that generates or updates an API test plan or code \
     based on user instructions. Reply with well-structured text or code. \
     Do NOT include extra commentary outside code blocks."
        .to_string()
}

pub fn plan_prompt() -> String {
    "Generate a test plan for a fictional REST API with categories like \
     authorization, boundary, and error handling. Include a few scenarios each."
        .to_string()
}

/// Skeleton of the emitted pytest file. `BASE_URL` comes from TEST_API_URL in
/// the environment of the *generated* tests; this program never reads it.
pub const TEST_TEMPLATE: &str = "\
import os
import requests
import pytest

BASE_URL = os.getenv('TEST_API_URL', 'http://localhost:8000')

{test_functions}
";

pub fn generation_prompt() -> String {
    let mut out = String::new();

    out.push_str(
        "Below is a skeleton of our test file using pytest. Fill in the 'test_functions'\n\
         placeholder with tests for the following real API behavior:\n\n",
    );

    out.push_str(
        "1) GET /api/endpoint?param=max => 200, JSON { \"result\": \"success\" }\n\
         2) GET /api/endpoint?param=min => 200, JSON { \"result\": \"success\" }\n\
         3) If param != 'max'/'min':\n\
            - no Authorization header => 401\n\
            - 'Bearer invalid-api-key' => 403\n\
            - otherwise => 404\n\
         4) GET /api/nonexistent => 404\n\
         5) GET /api/error => 500\n\n",
    );

    out.push_str(
        "We want these exact tests:\n\
         - test_endpoint_with_max\n\
         - test_endpoint_with_min\n\
         - test_endpoint_no_auth\n\
         - test_endpoint_invalid_api_key\n\
         - test_endpoint_random_auth_key\n\
         - test_nonexistent_endpoint\n\
         - test_error_endpoint\n\n",
    );

    out.push_str("Skeleton:\n```python\n");
    out.push_str(TEST_TEMPLATE);
    out.push_str("```\n\n");

    out.push_str(
        "Requirements:\n\
         1. Use '/api/' prefix for all routes.\n\
         2. Only return valid Python code, wrapped in triple backticks (no extra commentary).\n\
         3. Keep 'BASE_URL' from env or default http://localhost:8000.\n\
         4. Provide all tests in place of {test_functions}.\n\
         5. Each test asserts the correct status code (and JSON if needed).\n\
         6. The final output should be a complete Python file that can run under pytest.\n",
    );

    out
}

/// User feedback goes in verbatim. If it contains backtick fences the
/// extractor may pick the wrong block; documented limitation, not worth
/// escaping around.
pub fn feedback_prompt(user_feedback: &str) -> String {
    let mut out = String::new();

    out.push_str(
        "We have the above logic for '/api/endpoint', '/api/nonexistent', and '/api/error'.\n",
    );
    out.push_str(&format!("User feedback: '{}'\n\n", user_feedback));

    out.push_str("Please update or expand the test code using the same approach.\n");
    out.push_str("The skeleton is:\n```python\n");
    out.push_str(TEST_TEMPLATE);
    out.push_str("```\n");
    out.push_str(
        "Insert your changes in {test_functions}, produce valid Python code in triple backticks.\n",
    );

    out
}
