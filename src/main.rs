use anyhow::Context;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    crown_diamonds_server::run()
        .await
        .context("server terminated")
}
