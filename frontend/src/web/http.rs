//! HTTP 请求封装模块
//!
//! [`HttpClient`] over `gloo-net`'s fetch wrapper.

use edutech::error::{ClientError, ClientResult};
use edutech::request::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use gloo_net::http::Request;

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooHttpClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for GlooHttpClient {
    async fn send(&self, req: HttpRequest) -> ClientResult<HttpResponse> {
        let mut builder = match req.method {
            HttpMethod::Get => Request::get(&req.url),
            HttpMethod::Post => Request::post(&req.url),
            HttpMethod::Put => Request::put(&req.url),
            HttpMethod::Patch => Request::patch(&req.url),
            HttpMethod::Delete => Request::delete(&req.url),
        };

        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ClientError::network(e.to_string()).in_op_with("http.build", req.url.clone()))?;

        let resp = request.send().await.map_err(|e| {
            ClientError::network(e.to_string()).in_op_with("http.send", req.url.clone())
        })?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ClientError::network(e.to_string()).in_op("http.body"))?;

        tracing::debug!(method = req.method.as_str(), url = %req.url, status, "http response");
        Ok(HttpResponse { status, body })
    }
}
