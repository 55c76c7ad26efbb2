use anyhow::Result;

fn main() -> Result<()> {
    gridfall::app::run()
}
