use ring_deque::{AccessError, RingDeque};

// Synthetic sensor feed, noisy enough to make the window interesting.
fn readings() -> impl Iterator<Item = i32> {
    (0i32..).map(|tick| {
        let wave = (tick * 37) % 100;
        wave - 50
    })
}

fn print_window(label: &str, window: &RingDeque<i32>) {
    println!(
        "{label}: {:?} ({} of {} slots)",
        window.to_vec(),
        window.len(),
        window.capacity()
    );
    println!("  raw layout: {:?}", window.raw_view());
}

fn main() -> Result<(), AccessError> {
    let mut window: RingDeque<i32> = RingDeque::with_capacity(4);

    for reading in readings().take(10) {
        match window.push_back(reading) {
            Some(evicted) => println!("pushed {reading}, evicted {evicted}"),
            None => println!("pushed {reading}"),
        }
    }
    print_window("after 10 readings", &window);
    println!("oldest {}, newest {}", window.front()?, window.back()?);

    let spread = window
        .iter()
        .fold((i32::MAX, i32::MIN), |(low, high), &value| {
            (low.min(value), high.max(value))
        });
    println!("window spread: {spread:?}");

    window.defragment();
    print_window("after defragment", &window);

    window.resize(6);
    window.extend(readings().skip(10).take(4));
    print_window("after resize to 6 and 4 more readings", &window);

    window.resize(2);
    print_window("after shrinking to 2", &window);

    let total: Result<i32, &str> = window.iter().try_fold(0i32, |sum, &value| {
        sum.checked_add(value).ok_or("window sum overflowed")
    });
    println!("window sum: {total:?}");

    Ok(())
}
