mod exec_log;
pub use exec_log::ExecLog;

mod recording_driver;
pub use recording_driver::RecordingDriver;

use rowbind::{Db, Flavor};

/// Builds a lenient SQL Server `Db` on top of a fresh recording driver.
pub fn setup() -> (Db, ExecLog, RecordingDriver) {
    setup_with(|_| {})
}

/// Like [`setup`], with a hook to adjust the builder first.
pub fn setup_with(f: impl FnOnce(&mut rowbind::Builder)) -> (Db, ExecLog, RecordingDriver) {
    let driver = RecordingDriver::new();
    let log = driver.log();

    let mut builder = Db::builder();
    builder.flavor(Flavor::SqlServer);
    f(&mut builder);

    let db = builder.build(driver.clone()).unwrap();
    (db, log, driver)
}
