#[cfg(test)]
mod logger_stdout_test {
    use log::LevelFilter;
    use textintp::logger;

    #[test]
    fn test_console_logger_init() {
        assert!(logger::init_console_logger(LevelFilter::Info).is_ok());
        assert_eq!(log::max_level(), LevelFilter::Info);
        log::info!("console logger is up");

        // The backend is process-wide, a second install must fail
        assert!(logger::init_console_logger(LevelFilter::Debug).is_err());
    }
}
