fn main() {
    // Forward ESP-IDF sysenv (cfgs, link args) only for on-target builds.
    // Host builds run with default features and no ESP-IDF toolchain.
    if std::env::var("CARGO_FEATURE_ESPIDF").is_ok() {
        embuild::espidf::sysenv::output();
    }
}
