//! The shim entry point: decode, invoke, encode.

use std::fmt;
use std::sync::Arc;

use lambda_shim_core::{
    ApiGatewayProxyRequest, ApiGatewayProxyResponse, ApiGatewayV2HttpRequest,
    ApiGatewayV2HttpResponse,
};
use tokio_util::sync::CancellationToken;

use crate::dialect::{Dialect, HttpApi, RestProxy};
use crate::error::ShimError;
use crate::handler::Handler;
use crate::log::{Log, NoopLog};
use crate::response::ResponseWriter;

/// Construction-time options for [`Shim`].
#[derive(Default)]
pub struct ShimConfig {
    /// Diagnostic sink; `None` keeps the default silent sink.
    pub logger: Option<Arc<dyn Log>>,
}

/// Thin layer between an ordinary request/response handler and the
/// gateway's event envelopes.
///
/// One `Shim` serves any number of invocations; each invocation runs
/// decode → handler → encode sequentially with a fresh
/// [`ResponseWriter`], so the only shared state is the handler itself and
/// the diagnostic sink. Cancellation is advisory: the token rides on the
/// canonical request for the handler to observe, and the shim neither
/// enforces timeouts nor aborts handler work.
pub struct Shim<H> {
    handler: H,
    log: Arc<dyn Log>,
}

impl<H: Handler> Shim<H> {
    /// Wrap `handler` with the default (silent) diagnostic sink.
    pub fn new(handler: H) -> Self {
        Self::with_config(handler, ShimConfig::default())
    }

    /// Wrap `handler` with explicit configuration.
    pub fn with_config(handler: H, config: ShimConfig) -> Self {
        Self {
            handler,
            log: config.logger.unwrap_or_else(|| Arc::new(NoopLog)),
        }
    }

    /// Translate a REST-proxy (v1) event, run the handler, and encode the
    /// outbound envelope. A decode failure is returned without invoking
    /// the handler.
    pub fn handle_rest_api_request(
        &self,
        event: ApiGatewayProxyRequest,
        cancel: CancellationToken,
    ) -> Result<ApiGatewayProxyResponse, ShimError> {
        self.invoke::<RestProxy>(event, cancel)
    }

    /// Translate an HTTP-API (v2) event, run the handler, and encode the
    /// outbound envelope. A decode failure is returned without invoking
    /// the handler.
    pub fn handle_http_api_request(
        &self,
        event: ApiGatewayV2HttpRequest,
        cancel: CancellationToken,
    ) -> Result<ApiGatewayV2HttpResponse, ShimError> {
        self.invoke::<HttpApi>(event, cancel)
    }

    fn invoke<D>(&self, event: D::Event, cancel: CancellationToken) -> Result<D::Response, ShimError>
    where
        D: Dialect,
        D::Event: fmt::Debug,
        D::Response: fmt::Debug,
    {
        self.log.emit(format_args!("event request: {event:?}"));

        let request = D::decode(event, cancel).inspect_err(|err| {
            self.log
                .emit(format_args!("could not construct http request: {err}"));
        })?;
        self.log.emit(format_args!("http request: {request:?}"));

        let mut writer = ResponseWriter::new();
        self.handler.serve(request, &mut writer);
        self.log.emit(format_args!("captured response: {writer:?}"));

        let response = D::encode(writer);
        self.log
            .emit(format_args!("outbound envelope: {response:?}"));

        Ok(response)
    }
}
