use taskdesk::commands::Cli;
use taskdesk::libs::messages::macros::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing();
    Cli::menu()
}
