fn main() -> anyhow::Result<()> {
    searchbench::run()
}
