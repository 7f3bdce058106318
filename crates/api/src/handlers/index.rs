use axum::response::Html;

const SERVICE_NAME: &str = "Ferrous Mirror";

pub async fn index() -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head><title>{name}</title></head>
<body>
<h1>{name}</h1>
<p>Version {version}</p>
<ul>
<li><code>/mirror?statusCode=503&amp;waitMs=3000&amp;responseBody=down&amp;responseHeaders[Retry-After]=30</code></li>
<li><code>/resolve/example.com</code></li>
<li><code>/ping/example.com?timeoutMs=1000</code></li>
</ul>
</body>
</html>"#,
        name = SERVICE_NAME,
        version = env!("CARGO_PKG_VERSION"),
    ))
}
