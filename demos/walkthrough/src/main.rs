use std::mem;

use dynarray::{DynArray, DynArrayError};

fn main() -> Result<(), DynArrayError> {
    let mut years = DynArray::from([1410, 753, 1789]);
    years.prepend(476);
    years.append(1969);
    println!("collected: {years:?} (len {}, capacity {})", years.len(), years.capacity());

    // Ownership transfers wholesale; the source is left empty but usable.
    let mut timeline = mem::take(&mut years);
    years.append(2001);
    println!("source after move: {years:?}");

    // Edit through a cursor: put 1492 before 1789, then drop 1789.
    let mut editor = timeline.cursor_mut();
    editor.seek_forward(3)?;
    editor.insert_before(1492);
    editor.advance()?;
    let removed = editor.remove()?;
    println!("replaced {removed} with 1492: {timeline:?}");

    let mut walker = timeline.cursor();
    while let Ok(year) = walker.get() {
        print!("{year} ");
        walker.advance()?;
    }
    println!();

    let span = timeline.iter().max().unwrap() - timeline.iter().min().unwrap();
    println!("span covered: {span} years");

    while let Ok(first) = timeline.pop_first() {
        println!("dispatched {first} ({} left, capacity {})", timeline.len(), timeline.capacity());
    }

    Ok(())
}
