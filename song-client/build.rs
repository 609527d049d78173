fn main() {
    println!("cargo::rustc-check-cfg=cfg(song_env)");
    if std::env::var("SONG_BACKEND_URL").is_ok_and(|s| !s.is_empty()) {
        println!("cargo::rustc-cfg=song_env");
    }
}
