//! Russian word lists. Surnames are gendered (-ов / -ова and friends), so
//! the last-name tables are split the same way first names are.

pub(crate) const FIRST_MALE: &[&str] = &[
    "Александр", "Дмитрий", "Максим", "Сергей", "Андрей", "Алексей", "Артём", "Илья", "Кирилл",
    "Михаил", "Никита", "Матвей", "Роман", "Егор", "Иван", "Владимир",
];

pub(crate) const FIRST_FEMALE: &[&str] = &[
    "Анастасия", "Мария", "Дарья", "Анна", "Елизавета", "Полина", "Виктория", "Екатерина",
    "Софья", "Александра", "Вероника", "Арина", "Алиса", "Ксения", "Валерия", "Ольга",
];

pub(crate) const LAST_MALE: &[&str] = &[
    "Иванов", "Смирнов", "Кузнецов", "Попов", "Васильев", "Петров", "Соколов", "Михайлов",
    "Новиков", "Фёдоров", "Морозов", "Волков", "Алексеев", "Лебедев", "Семёнов", "Егоров",
];

pub(crate) const LAST_FEMALE: &[&str] = &[
    "Иванова", "Смирнова", "Кузнецова", "Попова", "Васильева", "Петрова", "Соколова",
    "Михайлова", "Новикова", "Фёдорова", "Морозова", "Волкова", "Алексеева", "Лебедева",
    "Семёнова", "Егорова",
];

pub(crate) const CITIES: &[&str] = &[
    "Москва", "Санкт-Петербург", "Новосибирск", "Екатеринбург", "Казань", "Нижний Новгород",
    "Челябинск", "Самара", "Омск", "Ростов-на-Дону", "Уфа", "Красноярск", "Воронеж", "Пермь",
];

pub(crate) const STREETS: &[&str] = &[
    "ул. Ленина", "ул. Гагарина", "ул. Пушкина", "ул. Мира", "ул. Советская", "ул. Садовая",
    "ул. Центральная", "пр. Победы", "ул. Лесная", "ул. Школьная", "ул. Новая", "пер. Цветочный",
];
