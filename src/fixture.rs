//! The toy API under test, as a pure decision table.
//!
//! This is the oracle the generated pytest suite has to encode. It never
//! serves HTTP here; the real service runs elsewhere (TEST_API_URL). Keeping
//! the routing rules as a function makes the precedence order testable:
//! param matches beat auth checks, and among auth checks the invalid-key
//! check runs before the missing-header check.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: &'static str,
}

impl Response {
    fn new(status: u16, body: &'static str) -> Self {
        Self { status, body }
    }
}

pub fn route(path: &str, param: Option<&str>, authorization: Option<&str>) -> Response {
    match path {
        "/api/endpoint" => endpoint(param, authorization),
        "/api/nonexistent" => Response::new(404, r#"{"detail":"Non-existent endpoint"}"#),
        "/api/error" => Response::new(500, r#"{"detail":"Server error"}"#),
        _ => Response::new(404, r#"{"detail":"Not Found"}"#),
    }
}

fn endpoint(param: Option<&str>, authorization: Option<&str>) -> Response {
    if param == Some("max") || param == Some("min") {
        return Response::new(200, r#"{"result":"success"}"#);
    }

    if authorization == Some("Bearer invalid-api-key") {
        return Response::new(403, r#"{"detail":"Forbidden"}"#);
    }

    if authorization.is_none() {
        return Response::new(401, r#"{"detail":"Unauthorized"}"#);
    }

    Response::new(404, r#"{"detail":"Not found"}"#)
}
