//! Requests built by the core, executed against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then sends every kind of request
//! the core builds over real HTTP using ureq. Checks that the URIs, headers,
//! and template body the core produces are what the endpoint understands.

use messages_core::{HttpMethod, HttpRequest, HttpResponse, MessagesClient, NewMessage};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses come back as data.
fn execute(req: HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.url).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.url).call(),
        (HttpMethod::Post, Some(body)) => agent
            .post(&req.url)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Post, None) => agent.post(&req.url).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

fn data(response: &HttpResponse) -> serde_json::Value {
    let envelope: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    envelope["mData"].clone()
}

#[test]
fn message_lifecycle() {
    // Step 1: start mock server on a random port.
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    let client = MessagesClient::new(&format!("http://{addr}/messages")).unwrap();

    // Step 2: get all — should be empty.
    let resp = execute(client.build_get_all().unwrap());
    assert_eq!(resp.status, 200);
    assert_eq!(data(&resp), serde_json::json!([]));

    // Step 3: post a row whose text the template does not escape.
    let message = NewMessage::new("Integration test", "say \"hi\"");
    let resp = execute(client.build_post_one(&message).unwrap());
    assert_eq!(resp.status, 201);
    let created = data(&resp);
    assert_eq!(created["mTitle"], "Integration test");
    assert_eq!(created["mMessage"], "say \"hi\"");
    let id = i32::try_from(created["mId"].as_i64().unwrap()).unwrap();

    // Step 4: get the created row.
    let resp = execute(client.build_get_one(id).unwrap());
    assert_eq!(resp.status, 200);
    assert_eq!(data(&resp), created);

    // Step 5: get all — one row.
    let resp = execute(client.build_get_all().unwrap());
    assert_eq!(data(&resp).as_array().unwrap().len(), 1);

    // Step 6: delete.
    let resp = execute(client.build_delete_one(id).unwrap());
    assert_eq!(resp.status, 200);

    // Step 7: get after delete — 404 comes back as data.
    let resp = execute(client.build_get_one(id).unwrap());
    assert_eq!(resp.status, 404);
    assert!(resp.body.contains("not found"));

    // Step 8: delete again — 404.
    let resp = execute(client.build_delete_one(id).unwrap());
    assert_eq!(resp.status, 404);
}
