//! Feed a REST-proxy event through the shim and print the outbound
//! envelope as the gateway would see it.
//!
//! ```sh
//! cargo run --example hello
//! ```

use std::sync::Arc;

use lambda_shim::{ApiGatewayProxyRequest, ResponseWriter, Shim, ShimConfig, TracingLog};
use tokio_util::sync::CancellationToken;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let shim = Shim::with_config(
        |_req, writer: &mut ResponseWriter| {
            writer.write(b"hello, world");
        },
        ShimConfig {
            logger: Some(Arc::new(TracingLog)),
        },
    );

    let event = ApiGatewayProxyRequest {
        http_method: "GET".into(),
        path: "/hello".into(),
        ..Default::default()
    };

    let resp = shim
        .handle_rest_api_request(event, CancellationToken::new())
        .expect("decode failed");

    println!("{}", serde_json::to_string_pretty(&resp).expect("serialize"));
}
