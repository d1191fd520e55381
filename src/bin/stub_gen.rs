fn main() -> pyo3_stub_gen::Result<()> {
    let stub = metro::stub_info()?;
    stub.generate()?;
    Ok(())
}
