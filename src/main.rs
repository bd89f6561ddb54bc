use rask_logger::app;

fn main() -> anyhow::Result<()> {
    app::main()
}
