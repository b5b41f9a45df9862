fn main() -> anyhow::Result<()> {
    activity_suggester::cli::run()
}
