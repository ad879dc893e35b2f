//! Command session example - building and restructuring a tree over JSON

use bridge::Bridge;
use dom::TreeSerializer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let mut bridge = Bridge::new();

    let requests = [
        r#"{"requestId":1,"op":"createElement","id":"html"}"#,
        r#"{"requestId":2,"op":"createElement","id":"body"}"#,
        r#"{"requestId":3,"op":"createElement","id":"main"}"#,
        r#"{"requestId":4,"op":"setAttribute","id":"main","key":"role","value":"main"}"#,
        r#"{"requestId":5,"op":"appendChild","parentId":"html","childId":"main"}"#,
        r#"{"requestId":6,"op":"appendChild","parentId":"html","childId":"body"}"#,
        r#"{"requestId":7,"op":"appendChild","parentId":"body","childId":"main"}"#,
        r#"{"requestId":8,"op":"firstChild","parentId":"html"}"#,
        r#"{"requestId":9,"op":"elementCount"}"#,
    ];

    for request in requests {
        let response = bridge.execute_json(request)?;
        println!("{} -> {}", request, response);
    }

    println!("{}", TreeSerializer::new().render(bridge.registry(), "html")?);

    Ok(())
}
