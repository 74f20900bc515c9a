use case_core::{RepeatedTest, TestClass};
use log::info;

use crate::config::AppConfig;

pub fn classes(_config: &AppConfig) -> Vec<TestClass> {
    let test = RepeatedTest::new("customDisplayName", 3)
        .display_name("Repeat!")
        .template("{displayName} {currentRepetition}/{totalRepetitions}")
        .body(|info| {
            info!("customDisplayName: about to execute repetition {} of {}", info.current, info.total);
            assert!(info.current <= info.total);
            Ok(())
        });
    vec![TestClass::new("RepeatedTestsDemo").repeated(test)]
}
