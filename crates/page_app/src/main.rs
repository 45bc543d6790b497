fn main() -> anyhow::Result<()> {
    page_app::run_app()
}
