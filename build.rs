use std::env;
use std::fs;
use std::path::Path;

// Variables que AppConfig lee con option_env!
const CONFIG_KEYS: &[&str] = &[
    "API_BASE_URL_DEVELOPMENT",
    "API_BASE_URL_PRODUCTION",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "TOKEN_STORAGE_KEY",
];

fn main() {
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    if !CONFIG_KEYS.contains(&key) {
                        println!("cargo:warning=Ignoring unknown key in .env: {}", key);
                        continue;
                    }

                    // El entorno del proceso tiene prioridad sobre .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    }

    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
}
