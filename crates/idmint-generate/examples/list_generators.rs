use idmint_generate::generators::GeneratorRegistry;

fn main() {
    let registry = GeneratorRegistry::new();
    for generator in registry.describe() {
        println!("{:<16} {}", generator.id(), generator.description());
    }
}
