mod command;
mod report;
mod table_io;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
