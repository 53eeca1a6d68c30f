//! User-facing strings. The product ships in Russian only.

pub mod errors {
    pub const EMAIL_INVALID: &str = "Некорректный email адрес";
    pub const EMAIL_NOT_FOUND: &str = "Пользователь с таким email адресом не найден";
    pub const EMAIL_EMPTY: &str = "Введите email";
    pub const EMAIL_USED: &str = "Пользователь с таким email адресом уже существует";
    pub const EMAIL_OTHER: &str = "Ошибка email";
    pub const PASSWORD_WRONG: &str = "Email адрес и пароль не совпадают";
    pub const PASSWORD_EMPTY: &str = "Введите пароль";
    pub const PASSWORD_SHORT: &str = "Пароль должен содержать 6 и более знаков";
    pub const PASSWORD_OTHER: &str = "Ошибка пароля: Слишком простой";
    pub const ORG_NAME_EMPTY: &str = "Введите название организации";
    pub const ORG_NAME_OTHER: &str = "Name error";
    pub const WEBSITE_EMPTY: &str = "Введите сайт организации";
    pub const WEBSITE_OTHER: &str = "Website error";
    pub const NUMBER_INVALID: &str = "Введите целое число";
    pub const SUBJECT_EMPTY: &str = "Введите название курса";
    pub const STUDENT_EMPTY: &str = "Введите имя студента";
    pub const SCORES_EMPTY: &str = "Добавьте хотя бы одну оценку";
    pub const SAVE_FAILED: &str = "Не удалось сохранить FairCV";
    pub const LIST_FAILED: &str = "Не удалось загрузить список FairCV";
}

pub mod auth {
    pub const SIGN_IN_TAB: &str = "Вход с паролем";
    pub const SIGN_UP_TAB: &str = "Регистрация";
    pub const EMAIL: &str = "Электронная почта";
    pub const PASSWORD: &str = "Пароль";
    pub const NEW_PASSWORD: &str = "Новый пароль";
    pub const ORG_NAME: &str = "Название организации";
    pub const ORG_WEBSITE: &str = "Сайт организации";
    pub const SIGN_IN: &str = "Войти";
    pub const SIGN_UP: &str = "Зарегистрироваться";
    pub const SIGN_OUT: &str = "Выйти";
    pub const FORGOT_PASSWORD: &str = "Я забыл пароль";
    pub const NEW_PASSWORD_TITLE: &str = "Создание нового пароля";
    pub const RECOVERY_TITLE: &str = "Восстановление пароля";
    pub const SAVE: &str = "Сохранить";
    pub const SEND: &str = "Отправить";
    pub const GO_BACK: &str = "Вернуться назад";
}

pub mod messages {
    pub const LOADING: &str = "Loading...";
    pub const CONFIRMED_TITLE: &str = "Email подтвержден";
    pub const CONFIRMED_TEXT: &str =
        "Спасибо! После проверки вашей организации вы сможете войти в систему.";
    pub const CHECK_EMAIL_TITLE: &str = "Проверьте почту";
    pub const CHECK_EMAIL_TEXT: &str =
        "Мы отправили письмо со ссылкой. Перейдите по ней, чтобы продолжить.";
    pub const GO_TO_SIGN_IN: &str = "Перейти ко входу";
    pub const NOT_FOUND: &str = "Страница не найдена";
}

pub mod wallet {
    pub const CONNECT: &str = "Connect Metamask";
    pub const CONNECTING: &str = "Подключение кошелька...";
}

pub mod faircv {
    pub const LIST_TITLE: &str = "Мои FairCV";
    pub const CREATE: &str = "Создать FairCV";
    pub const CREATE_TITLE: &str = "Новый FairCV";
    pub const EMPTY_LIST: &str = "Вы еще не создали ни одного FairCV";
    pub const STUDENT: &str = "Студент";
    pub const STUDENT_NAME: &str = "ФИО студента";
    pub const SCORES: &str = "Оценки";
    pub const CREATED: &str = "Создан";
    pub const COURSE: &str = "Курс";
    pub const LANGUAGE: &str = "Язык";
    pub const HOURS: &str = "Часы";
    pub const CREDITS: &str = "Кредиты";
    pub const GRADE: &str = "Оценка";
    pub const ADD_SCORE: &str = "Добавить оценку";
    pub const SAVE_CHANGES: &str = "Сохранить изменения";
    pub const EDIT: &str = "Редактировать";
    pub const DELETE: &str = "Удалить";
    pub const REMINDER: &str =
        "Внимательно проверьте все данные перед сохранением. Изменить сохраненные записи будет невозможно!";
    pub const SAVE_FAIRCV: &str = "Сохранить FairCV";
    pub const PAGE_BACK: &str = "Назад";
    pub const PAGE_FORWARD: &str = "Дальше";
}
