#![allow(clippy::expect_used, clippy::print_stdout)]

use uri_pieces::{Form, Output, StaticBuffer, Uri, normalize_scheme};

fn show(component: Option<&[u8]>) -> String {
    component.map_or_else(|| "(absent)".to_string(), |b| String::from_utf8_lossy(b).into_owned())
}

fn main() {
    // Parse an absolute URI
    let uri = Uri::parse("HTTPS://user:pw@example.com:8080/path?query=value#hash")
        .expect("Failed to parse URI");

    println!("Scheme: {} ({})", show(uri.scheme()), uri.scheme_type()); // HTTPS (https)
    println!("Userinfo: {}", show(uri.userinfo())); // user:pw
    println!("Host: {}", show(uri.host())); // example.com
    println!("Port: {:?}", uri.port_number()); // Some(8080)
    println!("Path: {}", show(uri.path())); // /path
    println!("Query: {}", show(uri.query())); // query=value
    println!("Fragment: {}", show(uri.fragment())); // hash

    // Lowercase the scheme into a fixed buffer
    let mut storage = StaticBuffer::<16>::new();
    let mut out = Output::new(&mut storage);
    let scheme = normalize_scheme(uri.as_bytes(), uri.parts(), &mut out)
        .expect("Scheme fits in 16 bytes");
    println!("Normalized scheme: {}", show(scheme.get(out.as_bytes()))); // https

    // Request-targets, as selected by the request line
    for (target, form) in [
        ("/where?q=now", Form::Origin),
        ("www.example.com:443", Form::Authority),
        ("*", Form::Asterisk),
    ] {
        match Uri::parse_target(target, form) {
            Ok(uri) => println!("{form}: path={} host={}", show(uri.path()), show(uri.host())),
            Err(err) => println!("{form}: {err}"),
        }
    }
}
