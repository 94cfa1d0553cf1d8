use log::Log;

pub(crate) struct StdoutLogger;

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        println!("{}: {}", record.level(), record.args());
    }

    fn flush(&self) {}
}
