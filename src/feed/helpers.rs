use rand::Rng;

pub fn generate_cache_buster() -> String {
    rand::thread_rng().gen_range(15000..70000).to_string()
}

pub fn is_http_source(source: &str) -> bool {
    let source = source.trim_start().to_lowercase();
    source.starts_with("http://") || source.starts_with("https://")
}
