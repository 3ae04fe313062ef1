use std::io::{stdin, stdout, Write};

use sightline::{Shell, DEFAULT_POINT_FILE};

fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    Shell::new(stdin().lock(), stdout(), DEFAULT_POINT_FILE).run()
}
