use dynarr::{DynamicArray, Error};
use quickcheck::Gen;

/// Two-field record used to exercise comparator sorting.
#[derive(Debug, Clone, Default, PartialEq)]
struct Person {
    name: String,
    surname: String,
}

impl Person {
    fn new(name: &str, surname: &str) -> Self {
        Self { name: name.to_string(), surname: surname.to_string() }
    }

    fn name(&self) -> &str { &self.name }

    fn surname(&self) -> &str { &self.surname }
}

// Ten lowercase cyrillic letters.
fn random_name(g: &mut Gen) -> String {
    let alphabet: Vec<char> = ('а'..='я').collect();
    (0..10).filter_map(|_| g.choose(&alphabet).copied()).collect()
}

fn people(count: usize) -> Vec<Person> {
    let mut g = Gen::new(10);
    (0..count)
        .map(|_| Person { name: random_name(&mut g), surname: random_name(&mut g) })
        .collect()
}

#[test]
fn add_and_get() {
    for (size, check) in [(10, 8), (60, 42), (90, 65)] {
        let list: DynamicArray<i32> = (0..size).map(|v| v * 3).collect();

        assert_eq!(list.size(), size as usize);
        assert_eq!(list.get(check as usize), Ok(&(check * 3)));
    }
}

#[test]
fn insert_people() {
    for (size, index) in [(60, 8), (92, 42), (180, 65)] {
        let objects = people(size);
        let mut list: DynamicArray<Person> = objects.iter().cloned().collect();
        let inserted = Person::new("Иван", "Иванов");

        list.insert(index, inserted.clone()).unwrap();

        assert_eq!(list.size(), size + 1);
        assert_eq!(list.get(index), Ok(&inserted));
        assert_eq!(list.get(index - 1), Ok(&objects[index - 1]));
        assert_eq!(list.get(index + 1), Ok(&objects[index]));
        assert_eq!(list.get(size), Ok(&objects[size - 1]));
    }
}

#[test]
fn get_invalid_index() {
    let list = DynamicArray::from([1, 2, 3]);
    assert_eq!(list.get(5), Err(Error::OutOfBounds { index: 5, size: 3 }));
}

#[test]
fn remove_with_index() {
    for (size, index) in [(15, 4), (92, 0), (180, 175)] {
        let values: Vec<u32> = (0..size).collect();
        let mut list = DynamicArray::from(values.clone());

        assert_eq!(list.remove(index as usize), Ok(true));

        assert_eq!(list.size(), size as usize - 1);
        assert_eq!(list.get(index as usize), Ok(&values[index as usize + 1]));
    }

    let mut list = DynamicArray::from([1, 2, 3]);
    assert_eq!(list.remove(2), Ok(true));
    assert!(list.get(2).is_err());
}

#[test]
fn remove_person() {
    let objects = people(200);
    let mut list: DynamicArray<Person> = objects.iter().cloned().collect();

    assert!(list.remove_item(&objects[80]));

    assert_eq!(list.get(80), Ok(&objects[81]));
    assert_eq!(list.get(79), Ok(&objects[79]));
    assert_eq!(list.size(), 199);

    assert!(!list.remove_item(&Person::default()));
    assert_eq!(list.size(), 199);
}

#[test]
fn clear() {
    let mut list: DynamicArray<i32> = (0..50).collect();
    assert_eq!(list.size(), 50);

    list.clear();
    assert_eq!(list.size(), 0);
    assert!(list.get(0).is_err());

    list.add(7);
    assert_eq!(list, [7]);
}

#[test]
fn set() {
    let mut list: DynamicArray<i32> = (0..50).collect();
    assert_eq!(list.set(15, 123), Ok(15));
    assert_eq!(list.get(15), Ok(&123));
}

#[test]
fn sort_natural() {
    let mut list = DynamicArray::from([5, 3, 1, 4, 2]);
    list.sort().unwrap();
    assert_eq!(&*list.to_array(), &[1, 2, 3, 4, 5]);
}

#[test]
fn sort_with_comparator() {
    let mut list: DynamicArray<Person> = people(200).into_iter().collect();
    list.add(Person::new("Аааартем", "Петров"));
    let unsorted = list.to_array();

    list.sort_by(|a, b| a.name().cmp(b.name()));
    let sorted = list.to_array();

    assert_ne!(unsorted, sorted);
    assert_ne!(sorted[0], unsorted[0]);
    assert_eq!(sorted[0].name(), "Аааартем");
    assert_eq!(sorted[0].surname(), "Петров");
    assert!(sorted.windows(2).all(|w| w[0].name() <= w[1].name()));

    list.sort_by(|a, b| a.name().cmp(b.name()));
    assert_eq!(list.iter().map(Person::name).collect::<Vec<_>>(), 
        sorted.iter().map(Person::name).collect::<Vec<_>>());
}

#[test]
fn sort_by_surname_key() {
    let mut list = DynamicArray::from([
        Person::new("b", "Сидоров"),
        Person::new("a", "Иванов"),
        Person::new("c", "Петров"),
    ]);
    list.sort_by_key(|p| p.surname().to_string());

    let names: Vec<&str> = list.iter().map(Person::name).collect();
    assert_eq!(names, ["a", "c", "b"]);
}

#[test]
fn to_array() {
    let list = DynamicArray::from(vec![1, 2, 3, 4, 5]);
    assert_eq!(&*list.to_array(), &[1, 2, 3, 4, 5]);
}

#[test]
fn default_person() {
    let p = Person::default();
    assert_eq!(p.name(), "");
    assert_eq!(p.surname(), "");
}
