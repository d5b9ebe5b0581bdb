use fast_kitchen_prerender::error::PrerenderResult;

#[tokio::main]
async fn main() -> PrerenderResult<()> {
    fast_kitchen_prerender::start_server().await
}
