// SPDX-License-Identifier: Apache-2.0
// SPDX-FileCopyrightText: 2026 Easyfix Contributors

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(config) = toml::from_str::<easyfix_core::config::AppConfig>(s) {
            let _ = config.validate();
        }
    }
});
