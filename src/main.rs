fn main() -> anyhow::Result<()> {
    chatlab::run()
}
