use probetable::{ProbeTable, TableBuilder, TableError};

fn main() -> Result<(), TableError> {
    env_logger::init();

    let mut table = ProbeTable::new(11);

    table.insert("John", "John Doe")?;
    table.insert("Jane", "Jane Doe")?;

    print!("{}", table);

    table.remove("John");
    println!("after removing John:");
    print!("{}", table);

    // a non-prime capacity with repeated keys and more keys than slots
    let mut table: ProbeTable<&str> = TableBuilder::new(10).build()?;
    let pairs = [
        ("John", "John Doe"),
        ("Jane", "Jane Doe"),
        ("Jasdne", "Jan466e Doe"),
        ("Jasdne", "Jane 4343Doe"),
        ("Jadsdne", "Ja34556ne Doe"),
        ("Jasdne", "Jan4433e Doe"),
        ("Jvvasdne", "Ja533466ne Doe"),
        ("Jsdcane", "Jane 43333oe"),
        ("Jandsfe", "Ja3566ne Doe"),
        ("assaJane", "Ja356567ne Doe"),
        ("Janfvcxve", "Ja4343543ne Doe"),
        ("Jadsfdsfne", "Ja456477ne Doe"),
    ];

    for (key, value) in pairs {
        match table.insert(key, value) {
            Ok(Some(old)) => println!("updated {}: {} -> {}", key, old, value),
            Ok(None) => {}
            Err(err) => println!("could not insert {}: {}", key, err),
        }
    }

    println!("{} of {} slots used:", table.len(), table.capacity());
    print!("{}", table);

    Ok(())
}
