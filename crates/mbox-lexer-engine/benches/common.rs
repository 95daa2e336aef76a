// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_archive(messages: usize) -> String {
    let mut content = String::new();
    for i in 0..messages {
        let day = i % 28 + 1;
        let hour = i % 24;
        content.push_str(&format!(
            "From sender{i}@example.com Mon Jan {day:02} {hour:02}:00:00 2024\n"
        ));
        content.push_str(&format!("Date: 01/{day:02}/24 {hour:02}:00 am\n"));
        content.push_str(&format!("Subject: Message number {i}\n"));
        content.push('\n');
        content.push_str("Body text that mentions From and Date: in passing.\n");
        content.push_str("Subject: quoted headers in bodies are not highlighted\n\n");
    }
    content
}

/// Archive where every header block is broken, so every run is demoted.
#[allow(dead_code)]
pub fn generate_broken_archive(messages: usize) -> String {
    generate_archive(messages).replace("Date: 01/", "Date: 13/")
}
