fn main() -> anyhow::Result<()> {
    topology_gen::generator::run_cli()
}
