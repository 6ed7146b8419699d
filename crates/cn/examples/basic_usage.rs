use tailcn::{cn, join, load_from_json, ClassValue};

fn main() {
    let is_active = true;
    let has_error = false;

    let button = cn!(
        "px-4 py-2 rounded bg-gray-200",
        ("bg-blue-500 text-white", is_active),
        ("bg-red-500", has_error),
        "hover:bg-blue-600 p-3",
    );
    println!("button:   {}", button);

    let plain = join!(["a", "b"], ("c", true), None::<&str>);
    println!("join:     {}", plain);

    let merger = load_from_json(
        r#"{ "extend": { "classGroups": { "glow": ["glow-*"] } } }"#,
    );
    match merger {
        Ok(merger) => {
            let values = [ClassValue::from("glow-sm"), ClassValue::from("glow-lg")];
            println!("custom:   {}", tailcn::cn_with(&merger, values));
        }
        Err(err) => eprintln!("invalid config: {}", err),
    }
}
