use regex::Regex;

/// Pulls out the first code block in triple backticks (optionally tagged
/// `python`). If no code block is found, returns the entire string trimmed.
///
/// Later fences are ignored on purpose: models that echo commentary after the
/// code would otherwise leak it into the test file.
pub fn extract_code(llm_response: &str) -> String {
    let re = match Regex::new(r"(?s)```(?:python)?\s*(.*?)\s*```") {
        Ok(re) => re,
        Err(_) => return llm_response.trim().to_string(),
    };

    match re.captures(llm_response) {
        Some(caps) => caps[1].trim().to_string(),
        None => llm_response.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_fence_passes_through_trimmed() {
        assert_eq!(extract_code("  plain text  \n"), "plain text");
    }

    #[test]
    fn empty_input_returns_empty() {
        assert_eq!(extract_code(""), "");
    }

    #[test]
    fn single_fence_returns_interior() {
        let resp = "Here you go:\n```python\nimport pytest\n\ndef test_x():\n    pass\n```\nDone.";
        assert_eq!(
            extract_code(resp),
            "import pytest\n\ndef test_x():\n    pass"
        );
    }

    #[test]
    fn untagged_fence_also_matches() {
        assert_eq!(extract_code("```\nx = 1\n```"), "x = 1");
    }

    #[test]
    fn first_of_multiple_fences_wins() {
        let resp = "```python\nfirst = True\n```\nand also\n```python\nsecond = True\n```";
        assert_eq!(extract_code(resp), "first = True");
    }

    #[test]
    fn fence_with_no_content_yields_empty() {
        assert_eq!(extract_code("```python\n```"), "");
    }
}
