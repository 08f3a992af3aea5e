use settree_rs::object::Object;
use settree_rs::ops;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let one = Object::atom("1");
    println!("one = {}", one);
    let two = Object::atom("2");
    println!("two = {}", two);

    let a = Object::set([one.clone(), two.clone()]);
    println!("a = {}", a);
    let b = Object::set([two.clone(), one.clone(), one.clone()]);
    println!("b = {}", b);
    println!("a == b: {}", a == b);
    println!("one < a: {}", one < a);

    let c = Object::set([one.clone(), two.clone(), Object::atom("3")]);
    println!("c = {}", c);
    println!("a < c: {}", a < c);

    let p = ops::power_set(&a)?;
    println!("P(a) = {}", p);
    println!("|P(c)| = {}", ops::power_set_cardinality(&c)?);

    let three = Object::von_neumann(3);
    println!("3 = {}", three);

    match one.as_set() {
        Ok(elements) => println!("elements of one: {:?}", elements),
        Err(e) => println!("as_set(one) failed: {}", e),
    }

    Ok(())
}
