// LYRA_BRIDGE_TRACE=1 gated debug tracing (stderr only)

pub fn trace(msg: &str) {
    if std::env::var("LYRA_BRIDGE_TRACE").ok().as_deref() == Some("1") {
        eprintln!("[TRACE] {}", msg);
    }
}
