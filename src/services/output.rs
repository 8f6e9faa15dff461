use crate::domain::models::JsonOut;
use serde::Serialize;

pub fn print_report<T: Serialize>(
    json: bool,
    ok: bool,
    data: &T,
    text: impl Fn(&T) -> Vec<String>,
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&JsonOut { ok, data })?);
    } else {
        for line in text(data) {
            println!("{line}");
        }
    }
    Ok(())
}
