use linked_collections::{List, Queue, Stack};

fn main() {
    println!("\n[List]\n");

    let mut list = List::new();
    for word in ["alpha", "beta", "gamma"] {
        list.push_back(word);
    }
    println!("{list}");
    println!("{list:?}");

    println!("front: {:?}", list.front());
    println!("index of \"gamma\": {:?}", list.index_of(&"gamma"));

    println!("removed: {:?}", list.remove(0));
    println!("removed: {:?}", list.remove(10));
    println!("{list}");

    println!("\n[Stack]\n");

    let mut stack = Stack::new();
    for n in 1..=3 {
        stack.push(n);
        println!("{stack}");
    }
    while let Some(top) = stack.pop() {
        println!("popped {top}, leaving {stack}");
    }

    println!("\n[Queue]\n");

    let mut queue: Queue<u8> = (1..=3).collect();
    println!("{queue}");
    println!("front of the queue: {:?}", queue.peek());

    while let Some(front) = queue.dequeue() {
        println!("served {front}, leaving {queue}");
    }

    queue.enqueue(9);
    queue.clear();
    println!("after clear: {queue:?} (empty: {})", queue.is_empty());
}
