use std::io::Write;

pub fn report_version<W: Write>(out: &mut W, version: &str) -> std::io::Result<()> {
    out.write_all(format!("kubectl clogs {}\n", version).as_bytes())
}
