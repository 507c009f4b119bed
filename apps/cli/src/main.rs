fn main() -> anyhow::Result<()> {
    story_extract::run()
}
