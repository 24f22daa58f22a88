/// Print git describe and hash captured by build.rs as json.
pub fn print_report(name: &str) {
    println!("{}", report(name));
}

pub fn report(name: &str) -> String {
    format!(
        "{{\n  \"name\": \"{}\",\n  \"git_describe\": \"{}\",\n  \"git_hash\": \"{}\"\n}}",
        name,
        env!("GIT_DESCRIBE"),
        env!("GIT_HASH")
    )
}
