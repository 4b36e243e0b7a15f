use anyhow::Context;
use numeric_array::prelude::*;

fn show(label: &str, array: &NumericArray, precision: usize) {
    println!("{} = {}", label, array.to_string_with(&PrintOptions::new(precision)));
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let array1 = NumericArray::new(&[2.0, 4.0, 6.0, 8.0, 10.0])?;
    show("array1", &array1, 2);

    let ones = NumericArray::ones(array1.len())?;
    let array_add = array1.add(&ones).context("array1 + ones")?;
    show("array1 + ones", &array_add, 2);

    show("sin(array1)", &array1.sin()?, 4);
    show("exp(array1)", &array1.exp()?, 2);
    show("array1 ^ 3", &array1.pow(3.0)?, 1);

    println!("Sum: {:.2}", array1.sum());
    println!("Mean: {:.2}", array1.mean()?);
    println!("Max: {:.2} (index {})", array1.max()?, array1.argmax()?);
    println!("Min: {:.2} (index {})", array1.min()?, array1.argmin()?);
    println!("Std Dev: {:.6}", array1.std()?);
    println!("Prod: {:.2}", array1.product());

    let mut reversed = array1.copy()?;
    reversed.reverse();
    show("Reversed array1", &reversed, 2);

    show("Clip array1 to [3, 8]", &array1.clip(3.0, 8.0)?, 1);
    show("array1 + 100", &array1.add_scalar(100.0)?, 0);

    println!("Dot product with ones: {:.2}", dot(&array1, &ones)?);
    println!("L2 norm: {:.3}", l2_norm(&array1));

    let with_duplicates = NumericArray::new(&[2.0, 2.0, 3.0, 4.0, 3.0, 5.0, 6.0])?;
    show("Original with duplication", &with_duplicates, 0);
    show("Unique sorted", &with_duplicates.unique()?, 0);

    show("Linspace 0..1,6", &NumericArray::linspace(0.0, 1.0, 6)?, 3);
    show("Range 1..7 step 1", &NumericArray::range(1.0, 7.0, 1.0)?, 0);

    println!("array1 any: {}, all: {}", array1.any(), array_add.all());

    Ok(())
}
