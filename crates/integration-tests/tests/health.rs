mod harness;

use harness::server::TestServer;
use harness::stub_bedrock::StubInvoker;

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let stub = StubInvoker::with_body("{}");
    let server = TestServer::start(stub.state()).await.unwrap();

    let resp = server.client().get(server.url("/health")).send().await.unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "ok");
}
